use crate::application::catalog::{Catalog, CatalogError};
use crate::domain::{Book, Isbn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const RULE: &str = "==================================================";

/// 起動モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Terminal,
    Serve,
}

/// 1行ずつ質問して回答を読む入出力の組
struct Prompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R, W> Prompt<'_, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// 質問を表示し、前後の空白を除いた回答を返す。入力が終端なら`None`
    async fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// 起動モードを対話的に選択する
///
/// 終了が選ばれた場合、または入力が終端に達した場合は`None`を返す。
pub async fn choose_mode<R, W>(input: &mut R, output: &mut W) -> io::Result<Option<Mode>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut prompt = Prompt { input, output };

    loop {
        prompt.say("\nWhat would you like to do?").await?;
        prompt.say("1. Start the terminal app").await?;
        prompt.say("2. Start the API server").await?;
        prompt.say("3. Exit").await?;

        match prompt.ask("Your choice (1-3): ").await?.as_deref() {
            Some("1") => return Ok(Some(Mode::Terminal)),
            Some("2") => return Ok(Some(Mode::Serve)),
            Some("3") | None => {
                prompt.say("Goodbye!").await?;
                return Ok(None);
            }
            Some(_) => prompt.say("Invalid choice!").await?,
        }
    }
}

/// ターミナルメニューのループ
///
/// 各項目は入力を求めてからカタログ操作を呼び出し、結果を表示する。
/// 操作の失敗はメッセージとして表示し、ループは継続する。
/// 終了が選ばれるか入力が終端に達するとループを抜ける。
pub async fn run_menu<R, W>(catalog: &Catalog, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut prompt = Prompt { input, output };

    loop {
        prompt.say(&format!("\n{RULE}")).await?;
        prompt.say("BOOK CATALOG").await?;
        prompt.say(RULE).await?;
        prompt.say("1. Add book by ISBN (Open Library)").await?;
        prompt.say("2. Add book manually").await?;
        prompt.say("3. Remove book").await?;
        prompt.say("4. List books").await?;
        prompt.say("5. Find book").await?;
        prompt.say("6. Exit").await?;
        prompt.say(RULE).await?;

        let Some(choice) = prompt.ask("Your choice (1-6): ").await? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(isbn) = prompt.ask("ISBN: ").await? else {
                    break;
                };
                let isbn = Isbn::new(isbn);
                if isbn.is_blank() {
                    prompt.say("ISBN must not be empty!").await?;
                    continue;
                }

                match catalog.add_by_isbn(&isbn).await {
                    Ok(book) => prompt.say(&format!("Book added: {book}")).await?,
                    Err(CatalogError::Lookup(e)) => {
                        prompt
                            .say(&format!("Book not found or lookup failed: {e}"))
                            .await?
                    }
                    Err(e) => prompt.say(&format!("Book could not be added: {e}")).await?,
                }
            }
            "2" => {
                let Some(title) = prompt.ask("Title: ").await? else {
                    break;
                };
                let Some(author) = prompt.ask("Author: ").await? else {
                    break;
                };
                let Some(isbn) = prompt.ask("ISBN: ").await? else {
                    break;
                };
                if title.is_empty() || author.is_empty() || isbn.is_empty() {
                    prompt.say("All fields are required!").await?;
                    continue;
                }

                let result = match Book::new(title, author, isbn) {
                    Ok(book) => catalog.add(book).await,
                    Err(e) => Err(e.into()),
                };
                match result {
                    Ok(book) => prompt.say(&format!("Book added: {book}")).await?,
                    Err(e) => prompt.say(&format!("Book could not be added: {e}")).await?,
                }
            }
            "3" => {
                let Some(isbn) = prompt.ask("ISBN of the book to remove: ").await? else {
                    break;
                };
                match catalog.remove(&Isbn::new(isbn)).await {
                    Ok(true) => prompt.say("Book removed.").await?,
                    Ok(false) => prompt.say("No book with this ISBN was found.").await?,
                    Err(e) => prompt.say(&format!("Book could not be removed: {e}")).await?,
                }
            }
            "4" => {
                let books = catalog.list().await;
                if books.is_empty() {
                    prompt.say("The catalog is empty.").await?;
                } else {
                    prompt
                        .say(&format!("\nBooks in the catalog ({}):", books.len()))
                        .await?;
                    prompt.say(&"-".repeat(70)).await?;
                    for (i, book) in books.iter().enumerate() {
                        prompt.say(&format!("{:2}. {}", i + 1, book)).await?;
                    }
                }
            }
            "5" => {
                let Some(isbn) = prompt.ask("ISBN to search for: ").await? else {
                    break;
                };
                match catalog.find(&Isbn::new(isbn)).await {
                    Some(book) => prompt.say(&format!("Book found: {book}")).await?,
                    None => prompt.say("Book not found.").await?,
                }
            }
            "6" => {
                prompt.say("Exiting...").await?;
                break;
            }
            _ => {
                prompt
                    .say("Invalid choice. Please enter a number between 1 and 6.")
                    .await?
            }
        }
    }

    Ok(())
}
