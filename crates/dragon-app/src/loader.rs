//! Asynchronous file decoding.

use dragon_core::{DecodedImage, LoadError, is_image_mime};
use futures_util::stream::{FuturesUnordered, StreamExt};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, ImageBitmap};

/// Collect the files of a `FileList`.
pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Decode one file into a bitmap.
pub async fn decode_file(file: File) -> Result<(DecodedImage, ImageBitmap), LoadError> {
    let name = file.name();
    if !is_image_mime(&file.type_()) {
        return Err(LoadError::NotAnImage(name));
    }
    let window = web_sys::window().ok_or_else(|| LoadError::Decode("no window".to_string()))?;
    let promise = window
        .create_image_bitmap_with_blob(&file)
        .map_err(|err| LoadError::Decode(format!("{name}: {err:?}")))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|err| LoadError::Decode(format!("{name}: {err:?}")))?
        .dyn_into::<ImageBitmap>()
        .map_err(|_| LoadError::Decode(format!("{name}: not an ImageBitmap")))?;
    let decoded = DecodedImage::new(bitmap.width(), bitmap.height())?;
    Ok((decoded, bitmap))
}

/// Decode all `files` concurrently, calling `on_decoded` in completion order.
///
/// Non-image and undecodable files are logged and skipped.
pub async fn decode_files<F>(files: Vec<File>, mut on_decoded: F)
where
    F: FnMut(DecodedImage, ImageBitmap),
{
    let mut pending: FuturesUnordered<_> = files.into_iter().map(decode_file).collect();
    while let Some(result) = pending.next().await {
        match result {
            Ok((decoded, bitmap)) => on_decoded(decoded, bitmap),
            Err(LoadError::NotAnImage(name)) => log::warn!("Skipping {name}: not an image"),
            Err(err) => log::warn!("Could not load image: {err}"),
        }
    }
}
