//! Renders a decoded project as indented pseudocode.
//!
//! Each target gets a `target: <name>` header, followed by one section per
//! script root and, at the end, any comments that aren't attached to a block.
//! Blocks are looked up in the rule tables in [`crate::rules`]; anything not
//! found there goes through a generic fallback, so rendering never fails on
//! an unfamiliar opcode.

use crate::flags::RenderFlags;
use crate::indent::{Finisher, Indented};
use crate::index::{BlockIndex, GraphProblem};
use crate::prelude::*;
use crate::rules::{self, Branch, Recipe};
use crate::sb3::{Block, BlockObject, Comment, InputValue, Project, Target};
use core::fmt::Write;
use indexmap::IndexMap;
use tracing::info;

mod args;
mod fallback;
mod procedures;

use args::{field, field_text, menu_field, write_literal};

const STANDALONE_SEPARATOR: &str = "--------------------------------";

/// Things noticed while rendering that don't stop the output being produced
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    /// target name, problem
    pub graph_problems: Vec<(Box<str>, GraphProblem)>,
    /// opcode -> ready-made rule table entry, in order of first appearance;
    /// only filled in when `suggest_rules` is on
    pub suggestions: IndexMap<Box<str>, String>,
}

pub fn render(project: &Project, flags: &RenderFlags) -> DumpResult<String> {
    let mut out = String::new();
    render_to(&mut out, project, flags)?;
    Ok(out)
}

pub fn render_to(
    sink: &mut dyn Write,
    project: &Project,
    flags: &RenderFlags,
) -> DumpResult<Diagnostics> {
    let mut diagnostics = Diagnostics::default();
    let mut roots = 0;
    for target in &project.targets {
        writeln!(sink, "target: {}", target.name)?;
        let index = BlockIndex::new(target);
        diagnostics.graph_problems.extend(
            index
                .problems()
                .iter()
                .map(|problem| (target.name.clone(), problem.clone())),
        );

        let mut scripts = ScriptRenderer::new(target, &index, flags);
        for root in index.roots() {
            writeln!(sink, "----- {root} -----")?;
            scripts.script(sink, root)?;
            writeln!(sink)?;
        }
        roots += index.roots().len();
        for (opcode, suggestion) in scripts.suggestions {
            diagnostics.suggestions.entry(opcode).or_insert(suggestion);
        }

        if flags.comments.is_on() {
            let mut standalone = target.standalone_comments().peekable();
            if standalone.peek().is_some() {
                writeln!(sink, "{STANDALONE_SEPARATOR}")?;
            }
            for comment in standalone {
                write_comment(sink, &comment.text)?;
            }
        }
    }
    info!(
        targets = project.targets.len(),
        roots,
        graph_problems = diagnostics.graph_problems.len(),
        "rendered project"
    );
    Ok(diagnostics)
}

/// `/****`, the indented text, `****/`
fn write_comment(w: &mut dyn Write, text: &str) -> DumpResult<()> {
    w.write_str("/****\n")?;
    Indented::starting_now(w).write_str(text)?;
    if !text.ends_with('\n') {
        w.write_char('\n')?;
    }
    w.write_str("****/\n")?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    /// a line of its own in a script
    Statement,
    /// plugged into another block's input
    Expression,
}

/// Renders the scripts of one target.
struct ScriptRenderer<'a> {
    target: &'a Target,
    index: &'a BlockIndex,
    flags: &'a RenderFlags,
    comments: BTreeMap<&'a str, Vec<&'a Comment>>,
    /// every block rendered so far in the current script
    visited: BTreeSet<&'a str>,
    suggestions: IndexMap<Box<str>, String>,
}

impl<'a> ScriptRenderer<'a> {
    fn new(target: &'a Target, index: &'a BlockIndex, flags: &'a RenderFlags) -> Self {
        ScriptRenderer {
            target,
            index,
            flags,
            comments: if flags.comments.is_on() {
                target.anchored_comments()
            } else {
                BTreeMap::new()
            },
            visited: BTreeSet::new(),
            suggestions: IndexMap::new(),
        }
    }

    fn script(&mut self, w: &mut dyn Write, root: &'a str) -> DumpResult<()> {
        self.visited.clear();
        self.chain(w, root)
    }

    /// Renders `first` and everything after it via `next`.
    ///
    /// Each hat or definition along the way pushes the rest of the chain one
    /// level deeper.
    fn chain(&mut self, w: &mut dyn Write, first: &'a str) -> DumpResult<()> {
        let mut depth = 0;
        let mut current = first;
        loop {
            let mut line = Indented::levels(w, depth);
            if !self.visited.insert(current) {
                writeln!(line, "[loop: {current}]")?;
                return Ok(());
            }
            if self.statement(&mut line, current)? {
                depth += 1;
            }
            match self.index.next(current) {
                Some(next) => current = next,
                None => return Ok(()),
            }
        }
    }

    /// Renders one statement, including any bodies hanging off it.
    ///
    /// Returns `true` if the rest of the script belongs indented underneath
    /// this block (hats and procedure definitions).
    fn statement(&mut self, w: &mut dyn Write, id: &'a str) -> DumpResult<bool> {
        for comment in self.comments_for(id) {
            write_comment(w, &comment.text)?;
        }
        let mut line = Finisher::new(w);
        let opens_scope = self.block(&mut line, id, Position::Statement)?;
        if line.mid_line() && self.flags.block_ids.is_on() {
            write!(line, "  # {id}")?;
        }
        line.finish()?;
        Ok(opens_scope)
    }

    fn expression(&mut self, w: &mut dyn Write, id: &'a str) -> DumpResult<()> {
        if !self.visited.insert(id) {
            write!(w, "[loop: {id}]")?;
            return Ok(());
        }
        self.block(w, id, Position::Expression)?;
        Ok(())
    }

    fn block(&mut self, w: &mut dyn Write, id: &'a str, position: Position) -> DumpResult<bool> {
        let block = match self.target.blocks.get(id) {
            Some(Block::Object(block)) => block,
            Some(Block::Literal(literal)) => {
                write_literal(w, literal)?;
                return Ok(false);
            }
            None => {
                write!(w, "[missing block: {id}]")?;
                return Ok(false);
            }
        };
        match rules::lookup(&block.opcode) {
            Some(recipe) => self.recipe(w, id, block, recipe, position),
            None => self.fallback(w, id, block, position),
        }
    }

    fn recipe(
        &mut self,
        w: &mut dyn Write,
        id: &'a str,
        block: &'a BlockObject,
        recipe: &Recipe,
        position: Position,
    ) -> DumpResult<bool> {
        match *recipe {
            Recipe::Call(label, args) => {
                w.write_str(label)?;
                self.call_args(w, block, args)?;
            }
            Recipe::Keyword(label, args) => self.keyword(w, block, label, args)?,
            Recipe::Field(name) => field(w, block, name)?,
            Recipe::MenuField(name, menu) => menu_field(w, block, name, menu)?,
            Recipe::Reference(kind, name) => match field_text(block, name) {
                Some(text) => write!(w, "[{kind} {text:?}]")?,
                None => write!(w, "[missing field: {name}]")?,
            },
            Recipe::FieldCall(name, args) => {
                field(w, block, name)?;
                self.call_args(w, block, args)?;
            }
            Recipe::Infix(symbol, lhs, rhs) => {
                w.write_char('(')?;
                self.input(w, block, lhs)?;
                write!(w, " {symbol} ")?;
                self.input(w, block, rhs)?;
                w.write_char(')')?;
            }
            Recipe::Prefix(symbol, operand) => {
                write!(w, "({symbol} ")?;
                self.input(w, block, operand)?;
                w.write_char(')')?;
            }
            Recipe::Hat(label, args) => {
                w.write_str(label)?;
                self.call_args(w, block, args)?;
                if position == Position::Statement {
                    self.header_end(w, id)?;
                    return Ok(true);
                }
            }
            Recipe::Control(label, args, branches) => {
                self.keyword(w, block, label, args)?;
                if position == Position::Statement {
                    self.branches(w, id, block, branches)?;
                }
            }
            Recipe::ProcedureDefinition => return self.definition(w, id, block, position),
            Recipe::ProcedurePrototype => self.prototype(w, id, block, position)?,
            Recipe::ProcedureCall => self.procedure_call(w, id, block, position)?,
        }
        Ok(false)
    }

    /// `(arg, arg)`
    fn call_args(
        &mut self,
        w: &mut dyn Write,
        block: &'a BlockObject,
        args: &[rules::Arg],
    ) -> DumpResult<()> {
        w.write_char('(')?;
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            self.arg(w, block, arg)?;
        }
        w.write_char(')')?;
        Ok(())
    }

    fn keyword(
        &mut self,
        w: &mut dyn Write,
        block: &'a BlockObject,
        label: &str,
        args: &[rules::Arg],
    ) -> DumpResult<()> {
        w.write_str(label)?;
        for arg in args {
            w.write_char(' ')?;
            self.arg(w, block, arg)?;
        }
        Ok(())
    }

    /// ends a line that opens an indented body
    fn header_end(&self, w: &mut dyn Write, id: &str) -> DumpResult<()> {
        w.write_char(':')?;
        if self.flags.block_ids.is_on() {
            write!(w, "  # {id}")?;
        }
        w.write_char('\n')?;
        Ok(())
    }

    fn branches(
        &mut self,
        w: &mut dyn Write,
        id: &'a str,
        block: &'a BlockObject,
        branches: &[Branch],
    ) -> DumpResult<()> {
        for (i, branch) in branches.iter().enumerate() {
            if i == 0 {
                self.header_end(w, id)?;
            }
            match branch.header {
                Some(header) => writeln!(w, "{header}:")?,
                None if i > 0 => writeln!(w, "{}:", branch.input)?,
                None => (),
            }
            self.body(&mut Indented::starting_now(w), block, branch.input)?;
        }
        Ok(())
    }

    /// the script inside a C mouth
    fn body(&mut self, w: &mut dyn Write, block: &'a BlockObject, input: &str) -> DumpResult<()> {
        match block.inputs.get(input).and_then(|slot| slot.value.as_ref()) {
            Some(InputValue::Block(head)) => self.chain(w, head),
            Some(InputValue::Literal(literal)) => {
                write_literal(w, literal)?;
                writeln!(w)?;
                Ok(())
            }
            None => {
                writeln!(w, "pass")?;
                Ok(())
            }
        }
    }

    /// Comments attached to a statement or to anything plugged into it, but
    /// not to the scripts inside its C mouths; those get their own turn.
    fn comments_for(&self, id: &'a str) -> Vec<&'a Comment> {
        if self.comments.is_empty() {
            return vec![];
        }
        let mut found = vec![];
        let mut seen = BTreeSet::new();
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            if !seen.insert(id) {
                continue;
            }
            found.extend(self.comments.get(id).into_iter().flatten().copied());
            if let Some(block) = self.target.block_object(id) {
                let children = block
                    .inputs
                    .iter()
                    .filter(|(name, _)| !rules::is_substack(name))
                    .filter_map(|(_, input)| match &input.value {
                        Some(InputValue::Block(child)) => Some(&**child),
                        _ => None,
                    });
                // reversed, so that they come off the stack in input order
                pending.extend(children.rev());
            }
        }
        found
    }
}
