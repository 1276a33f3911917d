//! GoBarber - a headless client for the GoBarber appointment-booking API
//!
//! Screens are plain controllers over a session store, a form layer and a
//! two-stack navigator; the binary drives them from the command line.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod traits;
