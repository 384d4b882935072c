// Morsesloth - Text/Morse Code Converter
// Module declarations
pub mod app;
pub mod audio;
pub mod morse;
pub mod settings;
pub mod tui;
