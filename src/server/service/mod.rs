//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, uniqueness and existence rules
//! - **Orchestration**: Sequencing repository calls and committing mutations
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod coupon;

#[cfg(test)]
mod test;
