use image::{Rgb, RgbImage};

use huffsteg::processing::storage::{load_codebook, load_grid, save_codebook, save_grid};
use huffsteg::{hide_message, reveal_message};

#[test]
fn test_hide_and_reveal_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let cover_path = dir.path().join("cover.png");
    let stego_path = dir.path().join("stego.png");
    let codebook_path = dir.path().join("stego.codebook.json");

    let cover = RgbImage::from_fn(32, 32, |x, y| {
        Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
    });
    cover.save(&cover_path).unwrap();

    let message = "If I were a rich man,\nall day long I'd biddy biddy bum!";
    let grid = load_grid(&cover_path).unwrap();
    let (stego, codebook) = hide_message(&grid, message).unwrap();
    save_grid(&stego, &stego_path).unwrap();
    save_codebook(&codebook, &codebook_path).unwrap();

    let reloaded = load_grid(&stego_path).unwrap();
    assert_eq!(reloaded, stego);

    let codebook = load_codebook(&codebook_path).unwrap();
    assert_eq!(reveal_message(&reloaded, &codebook).unwrap(), message);
}
