#![cfg_attr(not(feature = "std"), no_std)]

//! A from-scratch Keccak sponge hash, instantiated at rate 1088 /
//! capacity 512 with a 256-bit digest.

pub mod keccak;

#[doc(inline)]
pub use keccak::sponge::keccak256;
