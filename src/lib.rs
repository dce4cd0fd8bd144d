// =============================================================================
// lib.rs - Image color picker demo
// lib.rs - Démo de sélecteur de couleur par image
// =============================================================================

// =============================================================================
// MODULES
// =============================================================================

/// Configuration partagée (constantes)
/// Shared configuration (constants)
pub mod config;

/// Type couleur et classification clair/sombre
/// Color type and light/dark classification
pub mod color;

/// Types d'erreur de l'application
/// Application error types
pub mod error;

/// Sélecteurs et leur canal d'événements
/// Pickers and their event channel
pub mod picker;

/// État réactif et réglages persistés
/// Reactive state and persisted settings
pub mod store;

/// Interface (vue principale et feuille de sélection)
/// UI (home view and picker sheet)
pub mod app;

pub use color::Color;
pub use store::ColorStore;
