//! Icebreaker - conversation starter generation service.
//!
//! Turns answers to a fixed questionnaire into a single instruction for a
//! text-completion model and extracts up to three ice breakers from the reply.
//! Users can keep named answer profiles and favourite individual ice breakers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
