//! Core value types shared by the reader, the registry and the writers

mod id;
mod point;

pub use id::{LayerId, PointId};
pub use point::Point;
