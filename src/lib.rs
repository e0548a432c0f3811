#![no_std]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// PWM/DMA driver for STM32F1 devices
#[cfg(feature = "stm32-dma")]
#[cfg_attr(docsrs, doc(cfg(feature = "stm32-dma")))]
pub mod pwm_dma;

mod carrier;
mod encoder;
mod errors;
#[cfg(feature = "gamma-correction")]
mod gamma;
mod pixel;
mod scheduler;
mod strip;
mod transfer;

pub use carrier::{CarrierConfig, CARRIER_HZ, MIN_CORE_CLOCK_HZ};
pub use encoder::{encode_half, BitSymbols, SYMBOLS_PER_PIXEL};
pub use errors::InitError;
pub use pixel::Pixel;
pub use scheduler::{Half, State, TransferBuffer, TransferScheduler};
pub use strip::PixelBuffer;
pub use transfer::{TransferChannel, TransferEvent};
