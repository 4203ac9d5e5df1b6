pub const TITLE: &str = "TOWER OF HANOI";
pub const PROMPT: &str = "hanoi> ";

pub const DISK_FILL: char = '#';
pub const POLE: char = '|';
pub const BASE: char = '=';
pub const RULE: char = '-';
pub const SELECTED_LEFT: char = '<';
pub const SELECTED_RIGHT: char = '>';

pub const COMMANDS_LINE: &str =
    "1-3 pick/drop | 13 move | h hint | r reset | d <3-6> disks | i rules | q quit";

pub const TIP_TEXT: &str = "Tip: type a tower number to pick up its top disk, then another to drop it. \
x hides this tip, never hides it for good.";

pub const RULES: [&str; 4] = [
    "Move the whole stack from Source to Destination.",
    "Only one disk moves at a time, always the top disk of a tower.",
    "A disk may never rest on a smaller disk.",
    "The fewest possible moves is 2^n - 1. Type c to close.",
];

pub const PLAY_AGAIN_TEXT: &str = "Type p to play again or d <3-6> to change the number of disks.";
