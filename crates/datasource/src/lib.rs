pub mod error;
pub mod events;
pub mod memory;
pub mod models;
pub mod services;

pub use error::{ServiceError, ServiceResult};
pub use events::{EventChannel, UserUpdate};
pub use services::{
    BirthdayService, NameService, UpdateBirthdayData, UpdateNameData, UserManagementService,
};
