// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod model;
pub mod tables;
pub mod theory;

pub use catalog::*;
pub use model::*;
pub use tables::*;
pub use theory::*;
