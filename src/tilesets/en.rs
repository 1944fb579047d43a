use super::TileInfo;

pub(super) const TILESET: &[TileInfo] = &[
    (" ", 0, 0),
    ("a", 10, 1),
    ("b", 2, 4),
    ("c", 2, 4),
    ("d", 5, 2),
    ("e", 12, 1),
    ("f", 2, 4),
    ("g", 3, 3),
    ("h", 3, 4),
    ("i", 9, 1),
    ("j", 1, 10),
    ("k", 1, 5),
    ("l", 4, 1),
    ("m", 2, 3),
    ("n", 6, 1),
    ("o", 7, 1),
    ("p", 2, 4),
    ("q", 1, 10),
    ("r", 6, 1),
    ("s", 5, 1),
    ("t", 7, 1),
    ("u", 4, 2),
    ("v", 2, 4),
    ("w", 2, 4),
    ("x", 1, 8),
    ("y", 2, 4),
    ("z", 1, 10),
];
