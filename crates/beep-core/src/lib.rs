#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod consts;
pub mod count;
pub mod engine;
pub mod error;
pub mod notifier;
pub mod player;
pub mod report;
pub mod sound;
