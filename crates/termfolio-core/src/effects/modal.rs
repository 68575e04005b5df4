//! Project modal catalog and the simulated contact transmission.

use rand::Rng;

use crate::config::modal::{HEADER_PREFIX, SENT_LABEL, TRANSMIT_STEPS};

/// Content of a project modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Optional accent line listing tools
    pub tools: Option<&'static str>,
}

impl ModalEntry {
    /// Header shown above the modal body.
    pub fn header(&self) -> String {
        format!("{}: {}", HEADER_PREFIX, self.title)
    }
}

pub const MODALS: &[ModalEntry] = &[
    ModalEntry {
        id: "rev",
        title: "Reverse Engineering",
        paragraphs: &[
            "Deep analysis of compiled binaries using IDA Pro and Ghidra. Experience in unpacking custom packers, analyzing malware behavior, and reconstructing source code from assembly.",
        ],
        tools: Some("Tools: IDA Pro, Ghidra, x64dbg, Radare2"),
    },
    ModalEntry {
        id: "sec",
        title: "Security Research",
        paragraphs: &[
            "Vulnerability research focusing on RCE, LPE, and memory corruption bugs. Active participant in bug bounty programs with confirmed CVEs in enterprise software.",
        ],
        tools: None,
    },
    ModalEntry {
        id: "low",
        title: "Low Level Development",
        paragraphs: &[
            "System level programming in C/C++ and Rust. Kernel drivers, internal game hacks (DLL injection), and custom memory allocators.",
        ],
        tools: None,
    },
    ModalEntry {
        id: "java",
        title: "Java / Minecraft",
        paragraphs: &[
            "Advanced modifications for Minecraft clients. Custom rendering engines, packet manipulation (Netty), and anti-cheat bypass techniques.",
        ],
        tools: None,
    },
    ModalEntry {
        id: "linux",
        title: "Linux & Pentesting",
        paragraphs: &[
            "Automated pentesting scripts, custom Kali Linux tools, and hardened server configurations. Experience with bash scripting and python automation.",
        ],
        tools: None,
    },
    ModalEntry {
        id: "game",
        title: "Game Hacking",
        paragraphs: &[
            "Internal and external cheat development. ESP, Aimbot logic, and memory reading/writing. Bypass methods for standard anti-cheats.",
        ],
        tools: None,
    },
];

/// Look up a project modal by id. Unknown ids open nothing.
pub fn find_modal(id: &str) -> Option<&'static ModalEntry> {
    MODALS.iter().find(|m| m.id == id)
}

/// Button label animation for the fake contact form.
///
/// Nothing is sent anywhere: the label scrambles for a fixed number of frames
/// and then reports success.
#[derive(Debug, Clone, Default)]
pub struct Transmission {
    steps: u32,
}

/// A frame of the transmission animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransmitFrame {
    Scramble(String),
    /// Final label; the modal closes after a short delay
    Sent(&'static str),
}

impl Transmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TransmitFrame {
        self.steps += 1;
        if self.steps >= TRANSMIT_STEPS {
            TransmitFrame::Sent(SENT_LABEL)
        } else {
            TransmitFrame::Scramble(scramble_label(rng))
        }
    }
}

/// Random upper-case base-36 label, 4 to 6 characters long.
fn scramble_label<R: Rng + ?Sized>(rng: &mut R) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let len = rng.gen_range(4..=6);
    (0..len)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}
