pub mod confetti;
pub mod typewriter;
