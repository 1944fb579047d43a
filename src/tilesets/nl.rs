use super::TileInfo;

pub(super) const TILESET: &[TileInfo] = &[
    (" ", 0, 0),
    ("a", 7, 1),
    ("b", 2, 4),
    ("c", 2, 5),
    ("d", 5, 2),
    ("e", 18, 1),
    ("f", 2, 4),
    ("g", 3, 3),
    ("h", 2, 4),
    ("i", 4, 2),
    ("j", 2, 4),
    ("k", 3, 3),
    ("l", 3, 3),
    ("m", 3, 3),
    ("n", 11, 1),
    ("o", 6, 1),
    ("p", 2, 4),
    ("q", 1, 10),
    ("r", 5, 2),
    ("s", 5, 2),
    ("t", 5, 2),
    ("u", 3, 2),
    ("v", 2, 4),
    ("w", 2, 5),
    ("x", 1, 8),
    ("y", 1, 8),
    ("z", 2, 5),
];
