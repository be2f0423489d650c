pub mod scheduler;
pub mod view;
pub mod wave;
