pub mod bignum;
pub mod vector;
