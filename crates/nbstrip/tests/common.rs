#![allow(dead_code, missing_docs)]

pub const NOTEBOOK: &str = r##"{
  "cells": [
    {
      "cell_type": "markdown",
      "metadata": {},
      "source": ["# Sales analysis\n", "\n", "Load and summarise."]
    },
    {
      "cell_type": "code",
      "execution_count": 1,
      "metadata": {},
      "outputs": [],
      "source": [
        "\"\"\"\n",
        "Helpers for the sales notebook.\n",
        "\"\"\"\n",
        "import pandas as pd  # dataframes\n",
        "URL = \"https://example.com/data.csv#v2\"\n"
      ]
    },
    {
      "cell_type": "code",
      "execution_count": 2,
      "metadata": {},
      "outputs": [],
      "source": ["# just a comment\n"]
    },
    {
      "cell_type": "code",
      "execution_count": null,
      "metadata": {},
      "outputs": [],
      "source": ["   \n"]
    },
    {
      "cell_type": "raw",
      "metadata": {},
      "source": ["raw text"]
    },
    {
      "cell_type": "code",
      "execution_count": 3,
      "metadata": {},
      "outputs": [],
      "source": [
        "def total(df):\n",
        "    '''Sum the amount column.'''\n",
        "    return df['amount'].sum()  # float\n",
        "\n",
        "msg = 'it\\'s done'  # status\n",
        "doc = \"\"\"kept # as value\"\"\"\n"
      ]
    }
  ],
  "metadata": {
    "kernelspec": {"display_name": "Python 3", "language": "python", "name": "python3"},
    "language_info": {"name": "python", "version": "3.12.1"}
  },
  "nbformat": 4,
  "nbformat_minor": 5
}"##;

pub const BLANK_NOTEBOOK: &str = r#"{
  "cells": [
    {"cell_type": "code", "metadata": {}, "outputs": [], "source": ["  \n"]},
    {"cell_type": "markdown", "metadata": {}, "source": []}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"#;
