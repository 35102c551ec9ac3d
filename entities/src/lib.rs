pub mod music_info;

pub mod prelude {
    pub use super::music_info::Entity as MusicInfo;
}
