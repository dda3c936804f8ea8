//! Stage Implementations

mod command;

pub use command::{
    CommandStage, CHANGED_PATH_ENV, EVENT_ENV, MINIFY_ENV, MODE_ENV, SOURCE_MAPS_ENV,
};
