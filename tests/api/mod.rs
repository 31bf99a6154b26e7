//! Tests for resource calls and the multi-endpoint loaders.

mod activity;
mod load;
mod notification;
mod upload;

use chuflay_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use crate::util::TestClient;
