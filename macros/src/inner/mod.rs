pub mod peano;
