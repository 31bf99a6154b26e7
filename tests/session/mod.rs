//! Tests for the session store against a mocked API.
//!
//! Each test drives [`SessionStore`](chuflay::client::session::SessionStore)
//! through the HTTP transport and checks what it leaves in durable storage and
//! on the outbound credential.

mod impersonate;
mod login;
mod logout;
mod register;
mod restore;

use chuflay::client::session::{
    store::{CREDENTIAL_KEY, IDENTITY_KEY},
    KeyValueStorage,
};
use chuflay_test_utils::prelude::*;
use mockito::Matcher;

use crate::util::TestClient;
