pub mod routines;
