// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod expansion;
pub mod state;

pub use expansion::*;
pub use state::*;
