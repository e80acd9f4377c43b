use secure_stack::{SecureStack, StackError};

fn run() -> Result<(), StackError> {
    let mut stack = SecureStack::<&str>::new();
    for word in ["Hello", "World", "Secure", "Stack", "Java"] {
        stack.push(word);
    }

    while !stack.is_empty() {
        println!("Popped: {}", stack.pop()?);
    }

    println!("Attempting to pop from an empty stack...");
    stack.pop()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
    }
}
