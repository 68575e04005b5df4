//! Compiled-in configuration.
//!
//! Centralizes the constants shared by the web front end and the CLI: prompt
//! identity, the file catalog, boot log lines and the timings of every
//! decorative effect.

// =============================================================================
// Prompt Identity
// =============================================================================

/// User shown in the prompt and reported by `whoami`.
pub const PROMPT_USER: &str = "root";

/// Host shown in the prompt.
pub const PROMPT_HOST: &str = "tezzzt";

/// Working directory shown in the prompt. The filesystem is flat, so it never changes.
pub const PROMPT_DIR: &str = "~";

// =============================================================================
// Terminal Text
// =============================================================================

/// Lead-in of the `help` output; the accented command list follows.
pub const HELP_PREFIX: &str = "Available commands: ";

/// Shown once the boot log is done.
pub const WELCOME_LINE: &str = "Type 'help' for available commands.";

/// Output of `cat` without an operand.
pub const CAT_USAGE: &str = "Usage: cat [filename]";

// =============================================================================
// File Catalog
// =============================================================================

/// Files mounted at startup, in listing order.
pub const CATALOG: &[(&str, &str)] = &[
    (
        "about.txt",
        "I am a Security Researcher focused on low-level development and reverse engineering.",
    ),
    (
        "skills.md",
        "Key Skills:\n- C/C++\n- Assembly\n- Python\n- Reverse Engineering (IDA/Ghidra)\n- Malware Analysis",
    ),
    (
        "projects.json",
        "[\n  { name: 'SnakeC2', type: 'C2 Server' },\n  { name: 'VulnScan', type: 'Scanner' }\n]",
    ),
    (
        "contact.info",
        "GitHub: github.com/TezzzT\nEmail: root@tezzzt.io",
    ),
    ("secret.bin", "PERMISSION DENIED: Encrypted content."),
];

// =============================================================================
// Boot Sequence
// =============================================================================

/// Boot log messages and delays.
pub mod boot {
    /// Messages printed as `[OK] <message>`, in order.
    pub const LOG: &[&str] = &[
        "Loading kernel modules...",
        "Mounting file system...",
        "Initializing network interfaces...",
        "System Ready.",
    ];

    /// Minimum delay before each log line.
    pub const LINE_DELAY_MIN_MS: u32 = 100;
    /// Random extra delay added on top of the minimum (exclusive bound).
    pub const LINE_DELAY_JITTER_MS: u32 = 300;
    /// Pause between the last log line and hiding the boot screen.
    pub const FINAL_PAUSE_MS: u32 = 100;
    /// How long the CRT turn-on class stays applied.
    pub const CRT_ON_MS: u32 = 700;
}

// =============================================================================
// Hero Effects
// =============================================================================

/// Typewriter phrases and speeds.
pub mod typewriter {
    pub const PHRASES: &[&str] = &[
        "Security Researcher",
        "Reverse Engineer",
        "Low-Level Developer",
        "Exploit Developer",
    ];

    pub const TYPE_MS: u32 = 100;
    pub const DELETE_MS: u32 = 50;
    /// Pause once a phrase is fully typed.
    pub const HOLD_MS: u32 = 2000;
    /// Pause before typing the next phrase.
    pub const NEXT_MS: u32 = 500;
}

/// Decrypt-scramble animation.
pub mod decrypt {
    /// Replacement glyphs for characters that are not revealed yet.
    pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    /// Frames needed to reveal one character.
    pub const FRAMES_PER_CHAR: usize = 3;
    pub const FRAME_MS: u32 = 30;
    /// Delay after page load before headings start scrambling.
    pub const START_DELAY_MS: u32 = 4000;
}

/// 3D tilt on glass panels.
pub mod tilt {
    /// Maximum rotation on either axis, in degrees.
    pub const MAX_DEG: f64 = 5.0;
    pub const PERSPECTIVE_PX: u32 = 1000;
    pub const HOVER_SCALE: f64 = 1.02;
    /// Visible fraction of a panel that triggers its fade-in.
    pub const REVEAL_THRESHOLD: f64 = 0.1;
}

// =============================================================================
// Decorations
// =============================================================================

/// Hex dump ticker.
pub mod hexdump {
    pub const MAX_ROWS: usize = 20;
    pub const BYTES_PER_ROW: usize = 8;
    /// Exclusive upper bound for row addresses.
    pub const ADDR_LIMIT: u32 = 0xFF_FFFF;
    /// Exclusive upper bound for byte values.
    pub const BYTE_LIMIT: u8 = 0xFF;
    pub const TICK_MS: u32 = 200;
}

/// Matrix rain and particle network drawn on the background canvas.
pub mod backdrop {
    pub const GLYPHS: &[u8] = b"01ABCDEF";
    pub const FONT_PX: f64 = 14.0;
    /// Chance that a column past the bottom edge restarts on a given frame.
    pub const RESET_CHANCE: f64 = 0.025;
    pub const PARTICLE_COUNT: usize = 50;
    /// Maximum per-axis particle speed, in pixels per frame.
    pub const PARTICLE_SPEED: f64 = 0.25;
    /// Particles closer than this are linked.
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const FRAME_MS: u32 = 50;
}

/// Konami code easter egg.
pub mod konami {
    pub const SEQUENCE: &[&str] = &[
        "ArrowUp",
        "ArrowUp",
        "ArrowDown",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "ArrowLeft",
        "ArrowRight",
        "b",
        "a",
    ];

    pub const ALERT: &str = "SYSTEM OVERRIDE: ROOT ACCESS GRANTED";
    pub const HERO_TITLE: &str = "GOD_MODE";
    /// How long the `root-unlocked` flash class stays applied.
    pub const FLASH_MS: u32 = 1000;
}

/// Modal dialogs.
pub mod modal {
    pub const HEADER_PREFIX: &str = "SECURE_CONNECTION";
    pub const CONTACT_HEADER: &str = "ENCRYPTED_CHANNEL";
    pub const ACTION_LABEL: &str = "Initiate Protocol";

    pub const TRANSMIT_LABEL: &str = "TRANSMIT";
    pub const ENCRYPTING_LABEL: &str = "ENCRYPTING...";
    pub const SENT_LABEL: &str = "SENT_SECURELY";
    /// Scramble frames shown before the message counts as sent.
    pub const TRANSMIT_STEPS: u32 = 16;
    pub const TRANSMIT_FRAME_MS: u32 = 100;
    /// Delay between `SENT_SECURELY` and the modal closing.
    pub const CLOSE_DELAY_MS: u32 = 1000;
}
