pub mod pitch_class_transpose;

pub use pitch_class_transpose::transpose;
