mod api;
mod session;
mod util;
