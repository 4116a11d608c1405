mod app;
mod dom;
mod host;
mod logging;
