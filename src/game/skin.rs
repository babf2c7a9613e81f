//! Character skin upload.
//!
//! Dropping an image file onto the window loads it through the asset
//! server. The handle is published to the renderer only once the asset is
//! fully loaded; a failed decode is logged and the solid-color fallback
//! stays in place indefinitely.

use bevy::asset::LoadState;
use bevy::prelude::*;

/// The optional player character image.
#[derive(Resource, Default)]
pub struct PlayerSkin {
    /// Dropped but not yet confirmed loaded.
    pending: Option<Handle<Image>>,
    /// Published to the renderer.
    pub active: Option<Handle<Image>>,
}

/// Start loading any image file dropped onto the window.
pub fn handle_dropped_files(
    mut events: EventReader<FileDragAndDrop>,
    asset_server: Res<AssetServer>,
    mut skin: ResMut<PlayerSkin>,
) {
    for event in events.read() {
        if let FileDragAndDrop::DroppedFile { path_buf, .. } = event {
            info!("Loading character image from {:?}", path_buf);
            skin.pending = Some(asset_server.load(path_buf.clone()));
        }
    }
}

/// Publish a pending skin once it finishes loading; drop it on failure.
pub fn poll_pending_skin(asset_server: Res<AssetServer>, mut skin: ResMut<PlayerSkin>) {
    let Some(handle) = skin.pending.clone() else {
        return;
    };

    match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => {
            info!("Character image ready");
            skin.active = Some(handle);
            skin.pending = None;
        }
        Some(LoadState::Failed(err)) => {
            warn!("Character image failed to load, keeping fallback: {err}");
            skin.pending = None;
        }
        _ => {} // still loading
    }
}
