//! Wire types shared between the SmartPOS client and its REST backend.

pub mod domain;
