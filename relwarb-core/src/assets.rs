// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Asset collaborator contract
//!
//! Image decoding happens outside the core. The world only stores decoded
//! pixel buffers in its bitmap table and hands out [`BitmapId`] handles.

use crate::ecs::components::BitmapId;
use crate::ecs::World;

/// Decoded RGBA8 image, rows stored bottom-up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Wrap decoded pixels
    ///
    /// # Panics
    ///
    /// Panics if `data` does not hold exactly `width * height` RGBA pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "Bitmap data does not match its dimensions"
        );
        Bitmap {
            width,
            height,
            data,
        }
    }

    /// Single-color bitmap, handy for placeholders and tests
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Bitmap::new(width, height, data)
    }
}

/// Loads and decodes image files
pub trait BitmapLoader {
    /// Decode the image at `path`
    ///
    /// Returns `None` when the file is missing or cannot be decoded.
    fn load_bitmap_data(&mut self, path: &str) -> Option<Bitmap>;
}

impl World {
    /// Load `path` through `loader` and store it in the bitmap table
    ///
    /// # Panics
    ///
    /// Panics if the loader returns no data or the bitmap table is full.
    /// Content is fixed at build time, so a missing asset is a packaging bug.
    pub fn load_bitmap(&mut self, loader: &mut dyn BitmapLoader, path: &str) -> BitmapId {
        let bitmap = match loader.load_bitmap_data(path) {
            Some(bitmap) => bitmap,
            None => panic!("Failed to load bitmap data from '{}'", path),
        };
        self.create_bitmap(bitmap)
    }
}
