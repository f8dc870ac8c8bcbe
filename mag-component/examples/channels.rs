//! Channel list driven from the keyboard.
//!
//! Arrows/PageUp/PageDown/Home/End move, Enter clicks (into a row, then the
//! focused button), Esc leaves a row, `q` quits. Logs go to `channels.log`.

use std::cell::RefCell;
use std::fs::File;
use std::io::{stdout, Write};
use std::rc::Rc;

use crossterm::cursor::MoveTo;
use crossterm::event::{read, Event as CtEvent, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use magdom::Key;
use mag_component::{shared, Button, Context, Descriptor, LayoutItem, LayoutList, LayoutListConfig};
use serde_json::json;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("channels.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut cx = Context::new();
    let status = Rc::new(RefCell::new(String::from("ready")));

    let mut data = Vec::new();
    for n in 1..=12 {
        let watch = shared(Button::new(&mut cx, "Watch")?);
        let info = shared(Button::new(&mut cx, "Info")?);
        let status = Rc::clone(&status);
        data.push(
            Descriptor::new(vec![
                LayoutItem::class(if n % 3 == 0 { "star" } else { "" }),
                LayoutItem::text(format!("Channel {n:02}")),
                LayoutItem::Widget(watch),
                LayoutItem::Widget(info),
            ])
            .value(json!({ "uri": format!("udp://239.0.0.{n}:1234") }))
            .on_click(move |row| {
                *status.borrow_mut() = format!("clicked #{} {}", row.index, row.value["uri"]);
            }),
        );
    }

    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new()
            .size(6)
            .no_data("No channels")
            .data(data),
    )?;
    let root = cx.dom.root();
    cx.dom.append_child(root, list.node())?;
    list.focus(&mut cx);

    terminal::enable_raw_mode()?;
    let result = run(&mut cx, &mut list, &status);
    terminal::disable_raw_mode()?;
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    result
}

fn run(
    cx: &mut Context,
    list: &mut LayoutList,
    status: &Rc<RefCell<String>>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        draw(cx, list, &status.borrow())?;

        let CtEvent::Key(key_event) = read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        if key_event.code == KeyCode::Char('q') {
            return Ok(());
        }
        list.handle_key(cx, Key::from(key_event.code))?;
    }
}

fn draw(cx: &Context, list: &LayoutList, status: &str) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let focused = list.focused_item().map(|item| item.node);
    let in_list = cx.is_focused(list.id());
    for (y, row) in list.list().slot_nodes().into_iter().enumerate() {
        let marker = match (focused == Some(row), in_list) {
            (true, true) => "> ",
            (true, false) => "* ",
            _ => "  ",
        };
        let mut line = format!("{marker}{}", cx.dom.text_content(row));
        if let Some(layout) = list.row_layout(row)
            && layout.contains_focus(cx)
        {
            line.push_str(&format!("   [button {}]", layout.focus_index() + 1));
        }
        queue!(out, MoveTo(0, y as u16), Print(line))?;
    }

    let footer = list.list().size() as u16 + 1;
    queue!(out, MoveTo(0, footer), Print(format!("status: {status}")))?;
    out.flush()
}
