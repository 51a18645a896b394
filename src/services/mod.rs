pub mod notes;
pub mod playlists;

pub use notes::save_note;
pub use playlists::PlaylistStore;
pub use practice_tests::TestRecords;
