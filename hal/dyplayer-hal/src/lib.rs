//! DYPlayer transport abstraction layer
//!
//! The DY-XXXX modules are driven over a plain 9600 baud UART. This crate
//! defines the two primitives the driver needs from that UART, so the same
//! driver code runs on any chip HAL (or a host serial port).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dyplayer-driver (DyPlayer)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dyplayer-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ IoUart over   │       │ custom impl   │
//! │ embedded-io   │       │ (test double) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`io::IoUart`] - Adapter for any `embedded_io` serial port

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod uart;

pub use io::IoUart;
pub use uart::{UartConfig, UartRx, UartTx};
