pub mod flashcard;
pub mod note;
pub mod playlist;
pub mod test_record;

pub use flashcard::{Flashcard, FlashcardDeck};
pub use note::Note;
pub use playlist::{extract_video_id, Playlist, VideoReference};
pub use test_record::{split_test_text, GeneratedTest};
