//! The interactive loop: bootstrap once, then one command per line until
//! `quit` or end of input.

use std::io::{self, BufRead, Write};

use food_core::{App, Transport};

use crate::command::{Command, HELP};
use crate::terminal::Terminal;

pub fn run<T, R, W>(app: &mut App<T>, terminal: &mut Terminal<R, W>) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    app.start();
    terminal.render_list(app.list())?;
    terminal.render_form(app.form())?;

    while let Some(line) = terminal.ask("> ")? {
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(app, terminal, command)?,
            Err(err) => terminal.print(&format!("{err} (type `help` for commands)"))?,
        }
    }
    Ok(())
}

fn execute<T, R, W>(app: &mut App<T>, terminal: &mut Terminal<R, W>, command: Command) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Refresh => {
            app.refresh();
            terminal.render_list(app.list())
        }
        Command::Show => {
            terminal.render_list(app.list())?;
            terminal.render_form(app.form())
        }
        Command::Set(field, value) => {
            app.set_field(field, value);
            terminal.render_form(app.form())
        }
        Command::Submit => {
            if app.submit(terminal).needs_refresh() {
                terminal.render_list(app.list())?;
            }
            terminal.render_form(app.form())
        }
        Command::Edit(position) | Command::Delete(position) => {
            let Some(item) = app.list().at_position(position) else {
                return terminal.print(&format!("no food at position {position}"));
            };
            let action = if matches!(command, Command::Edit(_)) {
                item.edit.action.clone()
            } else {
                item.delete.action.clone()
            };
            app.dispatch(&action, terminal);
            terminal.render_list(app.list())?;
            terminal.render_form(app.form())
        }
        Command::Cancel => {
            app.cancel_edit();
            terminal.render_form(app.form())
        }
        Command::Help => terminal.print(HELP),
        Command::Quit | Command::Empty => Ok(()),
    }
}
