mod build;
mod integrity;
mod render;
