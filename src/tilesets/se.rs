use super::TileInfo;

pub(super) const TILESET: &[TileInfo] = &[
    (" ", 0, 0),
    ("a", 9, 1),
    ("b", 2, 3),
    ("c", 1, 8),
    ("d", 5, 1),
    ("e", 8, 1),
    ("f", 2, 3),
    ("g", 3, 2),
    ("h", 2, 3),
    ("i", 5, 1),
    ("j", 1, 7),
    ("k", 3, 3),
    ("l", 5, 2),
    ("m", 3, 3),
    ("n", 6, 1),
    ("o", 6, 2),
    ("p", 2, 4),
    ("q", 0, 0),
    ("r", 8, 1),
    ("s", 8, 1),
    ("t", 9, 1),
    ("u", 3, 4),
    ("v", 2, 3),
    ("w", 0, 0),
    ("x", 1, 8),
    ("y", 1, 7),
    ("z", 1, 8),
    ("å", 2, 4),
    ("ä", 2, 4),
    ("ö", 2, 4),
];
