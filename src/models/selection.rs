//! 选区：固定端 anchor + 随光标移动的 head，位置均为 (行, 字符列)

pub type Pos = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: Pos,
    head: Pos,
}

impl Selection {
    /// Empty selection at `pos`; shift+movement then drags the head away from it.
    pub fn collapsed(pos: Pos) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn anchor(&self) -> Pos {
        self.anchor
    }

    pub fn head(&self) -> Pos {
        self.head
    }

    pub fn set_head(&mut self, pos: Pos) {
        self.head = pos;
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn ordered(&self) -> (Pos, Pos) {
        (self.anchor.min(self.head), self.anchor.max(self.head))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
