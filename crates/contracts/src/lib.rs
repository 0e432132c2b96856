//! Wire types shared by the frontend widget and the backend proxy.

pub mod enums;
pub mod usecases;
