use deathchest_core::BlockPos;

/// Values substituted into label and chat templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateVars<'a> {
    pub owner: Option<&'a str>,
    pub pos: Option<BlockPos>,
}

impl<'a> TemplateVars<'a> {
    pub fn new(owner: &'a str, pos: BlockPos) -> Self {
        Self {
            owner: Some(owner),
            pos: Some(pos),
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "owner" => self.owner.map(str::to_string),
            "x" => self.pos.map(|p| p.x.to_string()),
            "y" => self.pos.map(|p| p.y.to_string()),
            "z" => self.pos.map(|p| p.z.to_string()),
            _ => None,
        }
    }
}

/// Substitute `{owner}`, `{x}`, `{y}` and `{z}` in `template`.
///
/// Single pass, so substituted values are never expanded again. Unknown or
/// unset placeholders are left verbatim.
pub fn render_template(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                let key = &tail[1..close];
                match vars.lookup(key) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
