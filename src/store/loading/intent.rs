use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIntent {
    Start,
    Stop,
}

impl Intent for LoadingIntent {}
