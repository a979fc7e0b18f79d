/// Fixed preset catalogs
///
/// Both editors offer one-shot presets that overwrite the instruction
/// text entirely. The prompt texts are deliberately English even though
/// the labels are Indonesian; the service's prompt template tells the
/// model to handle both.

/// A one-shot template phrase for the general editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub label: &'static str,
    pub text: &'static str,
}

/// The seven "Aksi Ajaib" template phrases.
pub const QUICK_PROMPTS: [QuickPrompt; 7] = [
    QuickPrompt {
        label: "Hapus Latar",
        text: "Remove the background and make it white.",
    },
    QuickPrompt {
        label: "Cyberpunk",
        text: "Change the lighting to a neon cyberpunk style.",
    },
    QuickPrompt {
        label: "Sketsa",
        text: "Turn this image into a detailed pencil sketch.",
    },
    QuickPrompt {
        label: "Kartun 3D",
        text: "Transform this into a 3D Pixar-style cartoon character.",
    },
    QuickPrompt {
        label: "Film Klasik",
        text: "Apply a vintage 1980s film grain and color grade.",
    },
    QuickPrompt {
        label: "Surealis",
        text: "Make it a dreamlike surrealist painting.",
    },
    QuickPrompt {
        label: "Pertajam",
        text: "Enhance the colors, sharpness, and details of the image.",
    },
];

/// An activity preset for the action-swap editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPreset {
    pub label: &'static str,
    pub prompt: &'static str,
}

/// The six activity presets.
pub const ACTION_PRESETS: [ActionPreset; 6] = [
    ActionPreset {
        label: "Makan",
        prompt: "Make the person eating a delicious meal",
    },
    ActionPreset {
        label: "Tidur",
        prompt: "Make the person sleeping peacefully in a bed",
    },
    ActionPreset {
        label: "Bekerja",
        prompt: "Make the person working on a laptop in an office",
    },
    ActionPreset {
        label: "Santai",
        prompt: "Make the person relaxing with a cup of coffee",
    },
    ActionPreset {
        label: "Duduk",
        prompt: "Make the person sitting comfortably on a chair",
    },
    ActionPreset {
        label: "Olahraga",
        prompt: "Make the person lifting weights in a gym",
    },
];

/// Wraps action-swap text in the fixed submission template.
///
/// The text goes in as-is, whether it came from a preset or was typed.
pub fn wrap_action(text: &str) -> String {
    format!("Change the subject's activity to: {text}")
}
