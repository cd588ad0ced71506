//! Asset loading
//!
//! Every sprite and clip is loaded once at startup. A missing asset aborts
//! the game.

use std::collections::HashMap;

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::audio::SoundId;
use crate::config::AssetPaths;
use crate::error::AssetError;

pub struct SpriteSheet {
    pub player: Texture2D,
    pub block: Texture2D,
}

pub struct Assets {
    pub sprites: SpriteSheet,
    pub sounds: HashMap<SoundId, Sound>,
}

/// Relative path of each sound in `paths`
pub fn sound_path(paths: &AssetPaths, sound: SoundId) -> &str {
    match sound {
        SoundId::MenuMusic => &paths.menu_music,
        SoundId::EasyMusic => &paths.easy_music,
        SoundId::IntenseMusic => &paths.intense_music,
        SoundId::Flap => &paths.flap_sound,
        SoundId::Death => &paths.death_sound,
    }
}

async fn load_sprite(path: String) -> Result<Texture2D, AssetError> {
    let texture = load_texture(&path).await.map_err(|e| AssetError::Texture {
        message: e.to_string(),
        path,
    })?;
    // Pixel art: no smoothing
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

pub async fn load_assets(paths: &AssetPaths) -> Result<Assets, AssetError> {
    let sprites = SpriteSheet {
        player: load_sprite(paths.resolve(&paths.player_sprite)).await?,
        block: load_sprite(paths.resolve(&paths.block_sprite)).await?,
    };

    let mut sounds = HashMap::new();
    for sound in SoundId::ALL {
        let path = paths.resolve(sound_path(paths, sound));
        let clip = load_sound(&path).await.map_err(|e| AssetError::Sound {
            message: e.to_string(),
            path: path.clone(),
        })?;
        log::debug!("loaded {:?} from {}", sound, path);
        sounds.insert(sound, clip);
    }

    log::info!("loaded {} sprites and {} sounds", 2, sounds.len());
    Ok(Assets { sprites, sounds })
}
