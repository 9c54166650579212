/// State management module
///
/// This module handles all application state, including:
/// - The fixed asset catalog (data.rs)
/// - Loading progress and the Loading → Ready phase (loading.rs)
/// - Slider selection and the displayed asset (viewer.rs)

pub mod data;
pub mod loading;
pub mod viewer;
