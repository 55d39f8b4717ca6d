//! A tiny evaluator for the module subset the compiler emits.
//!
//! Good enough to run generated modules back into a [`Value`] so tests can
//! check deep equality and shared identity without a JavaScript engine.
//! Anything outside the emitted subset panics.

#![allow(dead_code)]

use std::collections::HashMap;

use valmod_value::{ArrayValue, ObjectValue, Value};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Number(f64),
    BigInt(i128),
    Str(String),
    Punct(char),
}

fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c == '"' {
            let (s, next) = read_string(&chars, i + 1);
            tokens.push(Token::Str(s));
            i = next;
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len()
                && (chars[i].is_ascii_alphanumeric()
                    || chars[i] == '.'
                    || ((chars[i] == '-' || chars[i] == '+') && chars[i - 1] == 'e'))
            {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            if let Some(digits) = text.strip_suffix('n') {
                tokens.push(Token::BigInt(digits.parse().expect("bigint literal")));
            } else {
                tokens.push(Token::Number(text.parse().expect("number literal")));
            }
        } else if c == '_' || c == '$' || unicode_ident::is_xid_start(c) {
            let start = i;
            while i < chars.len()
                && (chars[i] == '$' || unicode_ident::is_xid_continue(chars[i]))
            {
                i += 1;
            }
            tokens.push(Token::Ident(chars[start..i].iter().collect()));
        } else {
            tokens.push(Token::Punct(c));
            i += 1;
        }
    }
    tokens
}

fn read_string(chars: &[char], mut i: usize) -> (String, usize) {
    let mut out = String::new();
    loop {
        let c = chars[i];
        i += 1;
        match c {
            '"' => return (out, i),
            '\\' => {
                let escape = chars[i];
                i += 1;
                match escape {
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'b' => out.push('\u{8}'),
                    'v' => out.push('\u{b}'),
                    'f' => out.push('\u{c}'),
                    '0' => out.push('\0'),
                    'x' | 'u' => {
                        let width = if escape == 'x' { 2 } else { 4 };
                        let hex: String = chars[i..i + width].iter().collect();
                        i += width;
                        let code = u32::from_str_radix(&hex, 16).expect("hex escape");
                        out.push(char::from_u32(code).expect("valid code point"));
                    }
                    other => out.push(other),
                }
            }
            c => out.push(c),
        }
    }
}

struct Loader {
    tokens: Vec<Token>,
    pos: usize,
    bindings: HashMap<String, Value>,
    export: Option<Value>,
}

/// Evaluate a generated module and return its exported value.
pub fn load(source: &str) -> Value {
    let mut loader = Loader {
        tokens: tokenize(source),
        pos: 0,
        bindings: HashMap::new(),
        export: None,
    };
    while loader.pos < loader.tokens.len() {
        loader.statement();
    }
    loader.export.expect("module has no export")
}

impl Loader {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn expect_punct(&mut self, c: char) {
        let token = self.next();
        assert_eq!(token, Token::Punct(c), "at token {}", self.pos);
    }

    fn expect_ident(&mut self, name: &str) {
        let token = self.next();
        assert_eq!(token, Token::Ident(name.to_string()), "at token {}", self.pos);
    }

    fn ident(&mut self) -> String {
        match self.next() {
            Token::Ident(name) => name,
            other => panic!("expected identifier, got {:?}", other),
        }
    }

    fn statement(&mut self) {
        match self.next() {
            Token::Str(s) if s == "use strict" => {}
            Token::Ident(word) if word == "const" => {
                let name = self.ident();
                self.expect_punct('=');
                let value = self.expr();
                assert!(
                    self.bindings.insert(name.clone(), value).is_none(),
                    "{} declared twice",
                    name
                );
            }
            Token::Ident(word) if word == "export" => {
                self.expect_ident("default");
                self.export = Some(self.expr());
            }
            Token::Ident(word) if word == "module" => {
                self.expect_punct('.');
                self.expect_ident("exports");
                self.expect_punct('=');
                self.export = Some(self.expr());
            }
            Token::Ident(word) if word == "Object" => self.define_property(),
            Token::Ident(base) => self.assignment(base),
            other => panic!("unexpected statement start {:?}", other),
        }
        self.expect_punct(';');
    }

    fn define_property(&mut self) {
        self.expect_punct('.');
        self.expect_ident("defineProperty");
        self.expect_punct('(');
        let name = self.ident();
        let target = self.binding(&name);
        self.expect_punct(',');
        let key = match self.next() {
            Token::Str(key) => key,
            other => panic!("expected key, got {:?}", other),
        };
        self.expect_punct(',');
        self.expect_punct('{');
        let mut value = None;
        loop {
            let field = self.ident();
            self.expect_punct(':');
            let field_value = self.expr();
            if field == "value" {
                value = Some(field_value);
            }
            if self.peek() == Some(&Token::Punct(',')) {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.expect_punct('}');
        self.expect_punct(')');
        set(&target, &key, value.expect("defineProperty without value"));
    }

    fn assignment(&mut self, base: String) {
        let mut target = self.binding(&base);
        let mut key = self.member_key();
        while self.peek() != Some(&Token::Punct('=')) {
            target = get(&target, &key);
            key = self.member_key();
        }
        self.expect_punct('=');
        let value = self.expr();
        set(&target, &key, value);
    }

    fn member_key(&mut self) -> String {
        match self.next() {
            Token::Punct('.') => self.ident(),
            Token::Punct('[') => {
                let key = match self.next() {
                    Token::Number(n) => (n as usize).to_string(),
                    Token::Str(s) => s,
                    other => panic!("unexpected member key {:?}", other),
                };
                self.expect_punct(']');
                key
            }
            other => panic!("expected member access, got {:?}", other),
        }
    }

    fn binding(&self, name: &str) -> Value {
        self.bindings
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("{} used before declaration", name))
    }

    fn expr(&mut self) -> Value {
        match self.next() {
            Token::Number(n) => Value::Number(n),
            Token::BigInt(n) => Value::BigInt(n),
            Token::Str(s) => Value::String(s),
            Token::Punct('-') => match self.next() {
                Token::Number(n) => Value::Number(-n),
                Token::BigInt(n) => Value::BigInt(-n),
                Token::Ident(word) if word == "Infinity" => Value::Number(f64::NEG_INFINITY),
                other => panic!("cannot negate {:?}", other),
            },
            Token::Punct('[') => self.array(),
            Token::Punct('{') => self.object(),
            Token::Ident(word) => match word.as_str() {
                "undefined" => Value::Undefined,
                "null" => Value::Null,
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                "NaN" => Value::Number(f64::NAN),
                "Infinity" => Value::Number(f64::INFINITY),
                name => self.binding(name),
            },
            other => panic!("unexpected expression {:?}", other),
        }
    }

    fn array(&mut self) -> Value {
        let array = ArrayValue::new();
        while self.peek() != Some(&Token::Punct(']')) {
            array.push(self.expr());
            if self.peek() == Some(&Token::Punct(',')) {
                self.pos += 1;
            }
        }
        self.expect_punct(']');
        array.into()
    }

    fn object(&mut self) -> Value {
        let object = ObjectValue::new();
        while self.peek() != Some(&Token::Punct('}')) {
            let key = match self.next() {
                Token::Ident(key) | Token::Str(key) => key,
                Token::Punct('[') => {
                    let Token::Str(key) = self.next() else {
                        panic!("computed keys must be strings");
                    };
                    self.expect_punct(']');
                    key
                }
                other => panic!("unexpected object key {:?}", other),
            };
            self.expect_punct(':');
            let value = self.expr();
            object.insert(key, value);
            if self.peek() == Some(&Token::Punct(',')) {
                self.pos += 1;
            }
        }
        self.expect_punct('}');
        object.into()
    }
}

fn get(target: &Value, key: &str) -> Value {
    match target {
        Value::Array(array) => match key.parse::<usize>() {
            Ok(index) => array.get(index),
            Err(_) => array.property(key),
        }
        .unwrap_or(Value::Undefined),
        Value::Object(object) => object.get(key).unwrap_or(Value::Undefined),
        other => panic!("cannot read {} of {:?}", key, other),
    }
}

fn set(target: &Value, key: &str, value: Value) {
    match target {
        Value::Array(array) if key == "length" => match value {
            Value::Number(n) => array.set_length(n as usize),
            other => panic!("invalid length {:?}", other),
        },
        Value::Array(array) => {
            array
                .set_property(key, value)
                .expect("array property assignment");
        }
        Value::Object(object) => {
            object.insert(key, value);
        }
        other => panic!("cannot assign {} on {:?}", key, other),
    }
}
