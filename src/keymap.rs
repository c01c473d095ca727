/// Play-mode keyboard commands for the teleprompter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrompterKey {
    TogglePlay,
    SpeedUp,
    SpeedDown,
    JumpForward,
    JumpBack,
    ToggleFullscreen,
    /// Leave fullscreen if active, otherwise back to the editor.
    Escape,
}

#[inline]
pub fn prompter_key(key: &str) -> Option<PrompterKey> {
    match key {
        "Enter" => Some(PrompterKey::TogglePlay),
        "ArrowUp" => Some(PrompterKey::SpeedUp),
        "ArrowDown" => Some(PrompterKey::SpeedDown),
        "ArrowRight" => Some(PrompterKey::JumpForward),
        "ArrowLeft" => Some(PrompterKey::JumpBack),
        "f" | "F" => Some(PrompterKey::ToggleFullscreen),
        "Escape" => Some(PrompterKey::Escape),
        _ => None,
    }
}
