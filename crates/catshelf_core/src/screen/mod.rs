//! List screen: adapter binding, navigation, and the screen controller.
//!
//! # Responsibility
//! - Own the activation/teardown lifecycle of the cat list screen.
//! - Keep view binding and navigation behind traits so frontends and tests
//!   can supply their own implementations.
//!
//! # Invariants
//! - The adapter is bound (possibly to an empty list) from the moment the
//!   controller exists; the view never observes a missing adapter.
//! - The adapter is only touched from the interactive side; fetch threads
//!   hand results back over a channel.

pub mod adapter;
pub mod list_screen;
pub mod nav;
