//! Startup and runtime errors
//!
//! The simulation itself never fails. Everything here comes from the
//! external collaborators (files, audio device, window, GPU surface) and is
//! fatal for the process.

use std::path::PathBuf;

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid font file {path}")]
    Font { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Device(#[source] rodio::StreamError),
    #[error("failed to open sound {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sound {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("failed to create music sink: {0}")]
    Sink(#[source] rodio::PlayError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Audio(#[from] AudioError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] pixels::Error),
    #[error("failed to present frame: {0}")]
    Present(#[source] pixels::Error),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}
