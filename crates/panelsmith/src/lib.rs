//! Panelsmith command-line front end.
//!
//! Generates the panels of a comic with Gemini. Narrative text streamed back
//! by the model is printed as voiceover while images are written to disk.

pub mod cli;
