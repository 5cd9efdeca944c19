pub mod tangle;
