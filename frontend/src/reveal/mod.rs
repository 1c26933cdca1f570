//! Scroll-driven entrance animations.
//!
//! Elements start in a preset's hidden state and transition to rest once an
//! `IntersectionObserver` reports them inside the viewport. The animation
//! itself is a CSS transition on inline styles.

pub mod components;
pub mod observer;
pub mod preset;
pub mod state;

pub use components::{Align, Counter, ScrollReveal, SectionHeader, StaggerContainer, StaggerItem, TextReveal};
pub use preset::Preset;
