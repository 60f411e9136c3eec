pub mod generator;

pub use generator::GenerationService;
